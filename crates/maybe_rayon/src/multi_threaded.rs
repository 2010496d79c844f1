use rayon::{
    iter::{IntoParallelIterator, IntoParallelRefIterator},
    slice::Iter,
};

pub trait MaybeParallelExt: IntoParallelIterator {
    fn maybe_into_par_iter(self) -> <Self as IntoParallelIterator>::Iter
    where
        Self: Sized,
    {
        self.into_par_iter()
    }
}

pub trait MaybeParallelRefExt<T: Sync> {
    fn maybe_par_iter(&self) -> Iter<'_, T>;
}

impl<T: IntoParallelIterator> MaybeParallelExt for T {}

impl<T: Sync> MaybeParallelRefExt<T> for [T] {
    fn maybe_par_iter(&self) -> Iter<'_, T> {
        self.par_iter()
    }
}
