pub trait TakeArray<T, const N: usize> {
    fn take_array(&mut self) -> Option<[T; N]>;
}

impl<I, T, const N: usize> TakeArray<T, N> for I
where
    I: Iterator<Item = T>,
{
    fn take_array(&mut self) -> Option<[T; N]> {
        self.by_ref().take(N).collect::<Vec<_>>().try_into().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_exactly_n_and_leaves_the_rest() {
        let mut fields = "1 2 3 4".split_whitespace();
        let first: Option<[&str; 3]> = fields.take_array();
        assert_eq!(first, Some(["1", "2", "3"]));
        assert_eq!(fields.next(), Some("4"));
    }

    #[test]
    fn short_stream_yields_none() {
        let mut fields = "1 2".split_whitespace();
        let taken: Option<[&str; 3]> = fields.take_array();
        assert_eq!(taken, None);
    }
}
