/// Helper trait to more conveniently test things for equality.
pub trait OutputEq<O = Self>
where
    O: ?Sized,
{
    fn output_eq(&self, other: &O) -> bool;
}

impl<A, B, C, D> OutputEq<(C, D)> for (A, B)
where
    A: OutputEq<C>,
    B: OutputEq<D>,
{
    #[inline]
    fn output_eq(&self, other: &(C, D)) -> bool {
        self.0.output_eq(&other.0) && self.1.output_eq(&other.1)
    }
}

macro_rules! partial_eq {
    ($ty:ty) => {
        impl OutputEq<$ty> for $ty {
            #[inline]
            fn output_eq(&self, other: &Self) -> bool {
                other == self
            }
        }
    };
}

partial_eq!(usize);

#[cfg(test)]
mod tests {
    use super::OutputEq;

    #[test]
    fn test_output_eq() {
        assert!((13usize, 1usize).output_eq(&(13usize, 1usize)));
        assert!(!(13usize, 1usize).output_eq(&(13usize, 2usize)));
    }
}
