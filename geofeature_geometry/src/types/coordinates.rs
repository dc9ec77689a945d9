use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, IgnoredAny, SeqAccess, Visitor},
	ser::{self, SerializeTuple},
};
use std::fmt::{self, Debug};

/// Largest magnitude below which every integral `f64` is exactly representable as `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A single GeoJSON position, `[x, y]`.
#[derive(Clone, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Returns a copy with both components rounded to `precision` decimals.
	///
	/// Components too large to carry `precision` decimals are returned unchanged.
	#[must_use]
	pub fn rounded(&self, precision: u8) -> Self {
		let factor = 10f64.powi(i32::from(precision));
		Self([round_component(self.0[0], factor), round_component(self.0[1], factor)])
	}
}

fn round_component(value: f64, factor: f64) -> f64 {
	let scaled = value * factor;
	// at this magnitude every f64 is integral, and scaled may have overflowed
	if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_INTEGER {
		return value;
	}
	scaled.round() / factor
}

/// One coordinate component. Integral values are written without a fraction, so `1.0` becomes `1`.
struct Component(f64);

impl Serialize for Component {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let value = self.0;
		if !value.is_finite() {
			return Err(ser::Error::custom(format!("coordinate {value} is not a finite number")));
		}
		if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
			serializer.serialize_i64(value as i64)
		} else {
			serializer.serialize_f64(value)
		}
	}
}

impl Serialize for Coordinates {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut tuple = serializer.serialize_tuple(2)?;
		tuple.serialize_element(&Component(self.0[0]))?;
		tuple.serialize_element(&Component(self.0[1]))?;
		tuple.end()
	}
}

struct CoordinatesVisitor;

impl<'de> Visitor<'de> for CoordinatesVisitor {
	type Value = Coordinates;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a position with exactly two numbers")
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Coordinates, A::Error> {
		let x: f64 = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(0, &self))?;
		let y: f64 = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(1, &self))?;
		if seq.next_element::<IgnoredAny>()?.is_some() {
			return Err(de::Error::custom("positions must have exactly two values"));
		}
		Ok(Coordinates([x, y]))
	}
}

impl<'de> Deserialize<'de> for Coordinates {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_seq(CoordinatesVisitor)
	}
}

impl<'a, T> From<&'a [T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &'a [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<[f64; 2]> for Coordinates {
	fn from(value: [f64; 2]) -> Self {
		Coordinates(value)
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<geo::Point> for Coordinates {
	fn from(value: geo::Point) -> Self {
		Coordinates([value.x(), value.y()])
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
