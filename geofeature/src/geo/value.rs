use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{MapAccess, SeqAccess, Visitor},
	ser,
};
use std::{
	cmp::Ordering,
	collections::BTreeMap,
	fmt::{self, Debug, Display},
	hash::Hash,
};

/// A dynamically typed JSON value, used for feature identifiers and property values.
///
/// Integers are normalized: non-negative values are always `UInt`, negative values `Int`.
/// Values built through the `From` conversions follow the same rule as decoded values,
/// so they compare equal after an encode/decode round trip.
#[derive(Clone, PartialEq)]
pub enum GeoValue {
	Array(Vec<GeoValue>),
	Bool(bool),
	Double(f64),
	Int(i64),
	Null,
	Object(BTreeMap<String, GeoValue>),
	String(String),
	UInt(u64),
}

impl Debug for GeoValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Array(v) => f.debug_tuple("Array").field(v).finish(),
			Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Self::Double(v) => f.debug_tuple("Double").field(v).finish(),
			Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
			Self::Null => f.debug_tuple("Null").finish(),
			Self::Object(v) => f.debug_tuple("Object").field(v).finish(),
			Self::String(v) => f.debug_tuple("String").field(v).finish(),
			Self::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
		}
	}
}

impl From<&str> for GeoValue {
	fn from(value: &str) -> Self {
		GeoValue::String(value.to_string())
	}
}

impl From<&String> for GeoValue {
	fn from(value: &String) -> Self {
		GeoValue::String(value.clone())
	}
}

impl From<String> for GeoValue {
	fn from(value: String) -> Self {
		GeoValue::String(value)
	}
}

impl From<u8> for GeoValue {
	fn from(value: u8) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i32> for GeoValue {
	fn from(value: i32) -> Self {
		GeoValue::from(i64::from(value))
	}
}

impl From<u32> for GeoValue {
	fn from(value: u32) -> Self {
		GeoValue::UInt(u64::from(value))
	}
}

impl From<i64> for GeoValue {
	fn from(value: i64) -> Self {
		if value < 0 {
			GeoValue::Int(value)
		} else {
			GeoValue::UInt(value as u64)
		}
	}
}

impl From<u64> for GeoValue {
	fn from(value: u64) -> Self {
		GeoValue::UInt(value)
	}
}

impl From<f32> for GeoValue {
	fn from(value: f32) -> Self {
		GeoValue::Double(f64::from(value))
	}
}

impl From<f64> for GeoValue {
	fn from(value: f64) -> Self {
		GeoValue::Double(value)
	}
}

impl From<bool> for GeoValue {
	fn from(value: bool) -> Self {
		GeoValue::Bool(value)
	}
}

impl<T> From<Vec<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Vec<T>) -> Self {
		GeoValue::Array(value.into_iter().map(GeoValue::from).collect())
	}
}

impl From<BTreeMap<String, GeoValue>> for GeoValue {
	fn from(value: BTreeMap<String, GeoValue>) -> Self {
		GeoValue::Object(value)
	}
}

impl<T> From<Option<T>> for GeoValue
where
	GeoValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map_or(GeoValue::Null, GeoValue::from)
	}
}

impl Eq for GeoValue {}

impl Hash for GeoValue {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		core::mem::discriminant(self).hash(state);
		match self {
			GeoValue::Array(v) => v.hash(state),
			GeoValue::Bool(v) => v.hash(state),
			GeoValue::Double(v) => v.to_bits().hash(state),
			GeoValue::Int(v) => v.hash(state),
			GeoValue::Null => (),
			GeoValue::Object(v) => v.hash(state),
			GeoValue::String(v) => v.hash(state),
			GeoValue::UInt(v) => v.hash(state),
		}
	}
}

impl PartialOrd for GeoValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for GeoValue {
	fn cmp(&self, other: &Self) -> Ordering {
		use GeoValue::*;
		match (self, other) {
			(String(a), String(b)) => a.cmp(b),
			(Double(a), Double(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
			(Int(a), Int(b)) => a.cmp(b),
			(UInt(a), UInt(b)) => a.cmp(b),
			(Bool(a), Bool(b)) => a.cmp(b),
			(Array(a), Array(b)) => a.cmp(b),
			(Object(a), Object(b)) => a.cmp(b),
			_ => self.variant_order().cmp(&other.variant_order()),
		}
	}
}

impl Display for GeoValue {
	/// Scalars are printed bare (strings without quotes), arrays and objects as compact JSON.
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			GeoValue::Bool(v) => write!(f, "{v}"),
			GeoValue::Double(v) => write!(f, "{v}"),
			GeoValue::Int(v) => write!(f, "{v}"),
			GeoValue::Null => f.write_str("null"),
			GeoValue::String(v) => f.write_str(v),
			GeoValue::UInt(v) => write!(f, "{v}"),
			GeoValue::Array(_) | GeoValue::Object(_) => self.fmt_json(f),
		}
	}
}

fn write_json_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
	f.write_str(&serde_json::to_string(value).map_err(|_| fmt::Error)?)
}

impl GeoValue {
	/// JSON-like rendering of nested values. Non-finite doubles are printed as `NaN`/`inf`.
	fn fmt_json(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			GeoValue::Array(list) => {
				f.write_str("[")?;
				for (index, value) in list.iter().enumerate() {
					if index > 0 {
						f.write_str(",")?;
					}
					value.fmt_json(f)?;
				}
				f.write_str("]")
			}
			GeoValue::Object(object) => {
				f.write_str("{")?;
				for (index, (key, value)) in object.iter().enumerate() {
					if index > 0 {
						f.write_str(",")?;
					}
					write_json_string(f, key)?;
					f.write_str(":")?;
					value.fmt_json(f)?;
				}
				f.write_str("}")
			}
			GeoValue::String(v) => write_json_string(f, v),
			GeoValue::Double(v) if v.is_finite() => write!(f, "{v:?}"),
			scalar => Display::fmt(scalar, f),
		}
	}

	fn variant_order(&self) -> u8 {
		match self {
			GeoValue::String(_) => 0,
			GeoValue::Double(_) => 1,
			GeoValue::Int(_) => 2,
			GeoValue::UInt(_) => 3,
			GeoValue::Bool(_) => 4,
			GeoValue::Array(_) => 5,
			GeoValue::Object(_) => 6,
			GeoValue::Null => 7,
		}
	}

	#[must_use]
	pub fn is_null(&self) -> bool {
		matches!(self, GeoValue::Null)
	}

	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		match self {
			GeoValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the value as `f64` for any of the three number variants.
	#[must_use]
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			GeoValue::Double(v) => Some(*v),
			GeoValue::Int(v) => Some(*v as f64),
			GeoValue::UInt(v) => Some(*v as f64),
			_ => None,
		}
	}
}

impl Serialize for GeoValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		match self {
			GeoValue::Array(v) => v.serialize(serializer),
			GeoValue::Bool(v) => serializer.serialize_bool(*v),
			GeoValue::Double(v) if !v.is_finite() => Err(ser::Error::custom(format!("number {v} is not finite"))),
			GeoValue::Double(v) => serializer.serialize_f64(*v),
			GeoValue::Int(v) => serializer.serialize_i64(*v),
			GeoValue::Null => serializer.serialize_unit(),
			GeoValue::Object(v) => v.serialize(serializer),
			GeoValue::String(v) => serializer.serialize_str(v),
			GeoValue::UInt(v) => serializer.serialize_u64(*v),
		}
	}
}

struct GeoValueVisitor;

impl<'de> Visitor<'de> for GeoValueVisitor {
	type Value = GeoValue;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("any JSON value")
	}

	fn visit_bool<E>(self, v: bool) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::Bool(v))
	}

	fn visit_i64<E>(self, v: i64) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::from(v))
	}

	fn visit_u64<E>(self, v: u64) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::UInt(v))
	}

	fn visit_f64<E>(self, v: f64) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::Double(v))
	}

	fn visit_str<E>(self, v: &str) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::from(v))
	}

	fn visit_string<E>(self, v: String) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::String(v))
	}

	fn visit_unit<E>(self) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::Null)
	}

	fn visit_none<E>(self) -> std::result::Result<GeoValue, E> {
		Ok(GeoValue::Null)
	}

	fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> std::result::Result<GeoValue, D::Error> {
		Deserialize::deserialize(deserializer)
	}

	fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<GeoValue, A::Error> {
		let mut list = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(value) = seq.next_element()? {
			list.push(value);
		}
		Ok(GeoValue::Array(list))
	}

	fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<GeoValue, A::Error> {
		let mut object = BTreeMap::new();
		while let Some((key, value)) = map.next_entry::<String, GeoValue>()? {
			object.insert(key, value);
		}
		Ok(GeoValue::Object(object))
	}
}

impl<'de> Deserialize<'de> for GeoValue {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_any(GeoValueVisitor)
	}
}
