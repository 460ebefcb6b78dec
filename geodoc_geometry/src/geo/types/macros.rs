/// Implements `CompositeGeometryTrait` and the `From` conversions for a newtype over `Vec<Item>`.
#[macro_export]
macro_rules! impl_composite {
	($($t:ty,$i:ty),*) => {$(
		impl $crate::CompositeGeometryTrait<$i> for $t {
			fn as_slice(&self) -> &[$i] {
				&self.0
			}

			fn into_inner(self) -> Vec<$i> {
				self.0
			}
		}

		impl<T> From<Vec<T>> for $t
		where
			$i: From<T>,
		{
			fn from(value: Vec<T>) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl<T, const N: usize> From<[T; N]> for $t
		where
			$i: From<T>,
		{
			fn from(value: [T; N]) -> Self {
				Self(value.into_iter().map(<$i>::from).collect())
			}
		}

		impl FromIterator<$i> for $t {
			fn from_iter<I: IntoIterator<Item = $i>>(iter: I) -> Self {
				Self(iter.into_iter().collect())
			}
		}

		impl<'a> IntoIterator for &'a $t {
			type Item = &'a $i;
			type IntoIter = std::slice::Iter<'a, $i>;

			fn into_iter(self) -> Self::IntoIter {
				self.0.iter()
			}
		}

		impl std::fmt::Debug for $t {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.debug_list().entries(&self.0).finish()
			}
		}
	)*}
}
