use std::cell::Cell;
use std::ops;


// Value that remembers whether it has been touched since the last render.
#[derive(Clone, Debug)]
pub struct Dirty<T> {
    value: T,
    dirty: Cell<bool>,
}

impl<T> Dirty<T> {
    // Starts dirty: nothing has been rendered yet.
    pub fn new(value: T) -> Self { Self { value, dirty: Cell::new(true) } }

    pub fn get_mut(&mut self) -> &mut T {
        self.dirty.set(true);
        &mut self.value
    }

    pub fn take_dirt(&self) -> bool { self.dirty.replace(false) }
}

impl<T> ops::Deref for Dirty<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target { &self.value }
}
// Don't implement `DerefMut`. A call to `get_mut` stresses the fact that it sets the dirty flag.


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_dirty_until_taken() {
        let value = Dirty::new(3);
        assert!(value.take_dirt());
        assert!(!value.take_dirt());
    }

    #[test]
    fn reading_keeps_clean() {
        let value = Dirty::new(String::from("abc"));
        value.take_dirt();
        assert_eq!(value.len(), 3);
        assert!(!value.take_dirt());
    }

    #[test]
    fn get_mut_marks_dirty() {
        let mut value = Dirty::new(vec![1]);
        value.take_dirt();
        value.get_mut().push(2);
        assert!(value.take_dirt());
        assert_eq!(*value, vec![1, 2]);
    }
}
