use std::{
	fmt::Debug,
	hash::{Hash, Hasher},
};

/// A position given as latitude and longitude, in that order.
///
/// This is the order users build geometries in. The GeoJSON wire order is the reverse; see
/// [`codec::to_wire`](crate::codec::to_wire) and [`codec::from_wire`](crate::codec::from_wire).
///
/// Two coordinates are equal when their components are equal bit for bit, except that `-0.0`
/// equals `0.0` and every NaN equals every other NaN. This keeps `Eq` and `Hash` consistent.
#[derive(Clone, Copy, Default)]
pub struct Coordinates {
	latitude: f64,
	longitude: f64,
}

impl Coordinates {
	#[must_use]
	pub fn new(latitude: f64, longitude: f64) -> Self {
		Self { latitude, longitude }
	}

	#[must_use]
	pub fn latitude(&self) -> f64 {
		self.latitude
	}

	#[must_use]
	pub fn longitude(&self) -> f64 {
		self.longitude
	}

	fn canonical_bits(&self) -> [u64; 2] {
		[canonical_bits(self.latitude), canonical_bits(self.longitude)]
	}
}

fn canonical_bits(value: f64) -> u64 {
	if value.is_nan() {
		f64::NAN.to_bits()
	} else if value == 0.0 {
		0
	} else {
		value.to_bits()
	}
}

impl PartialEq for Coordinates {
	fn eq(&self, other: &Self) -> bool {
		self.canonical_bits() == other.canonical_bits()
	}
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.canonical_bits().hash(state);
	}
}

/// `(latitude, longitude)`
impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&(f64, f64)> for Coordinates {
	fn from(value: &(f64, f64)) -> Self {
		Coordinates::new(value.0, value.1)
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({:?}, {:?})", self.latitude, self.longitude)
	}
}
