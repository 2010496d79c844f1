pub trait MaybeParallelExt: IntoIterator {
    fn maybe_into_par_iter(self) -> <Self as IntoIterator>::IntoIter
    where
        Self: Sized,
    {
        self.into_iter()
    }
}

pub trait MaybeParallelRefExt<T> {
    fn maybe_par_iter(&self) -> std::slice::Iter<'_, T>;
}

impl<T: IntoIterator> MaybeParallelExt for T {}

impl<T> MaybeParallelRefExt<T> for [T] {
    fn maybe_par_iter(&self) -> std::slice::Iter<'_, T> {
        self.iter()
    }
}
