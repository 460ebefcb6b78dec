use crate::PointGeometry;

/// Builds a [`PointGeometry`]. Components that are never set stay at `0.0`.
#[derive(Clone, Debug, Default)]
pub struct PointBuilder {
	latitude: f64,
	longitude: f64,
}

impl PointBuilder {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	pub fn latitude(mut self, latitude: f64) -> Self {
		self.latitude = latitude;
		self
	}

	pub fn longitude(mut self, longitude: f64) -> Self {
		self.longitude = longitude;
		self
	}

	#[must_use]
	pub fn build(self) -> PointGeometry {
		PointGeometry::new(self.latitude, self.longitude)
	}
}
