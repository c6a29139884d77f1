use crate::poly::Poly;

/// The value stack of the calculator. Polynomials on the stack are owned
/// exclusively; `push` takes ownership and `pop` gives it back. Underflow is
/// reported to the caller as `None`.
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<Poly>,
}

impl Stack {
    pub fn new() -> Stack {
        Stack { items: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn push(&mut self, poly: Poly) {
        self.items.push(poly);
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Poly> {
        self.items.pop()
    }

    /// Borrows the top polynomial without removing it.
    #[inline]
    pub fn top(&self) -> Option<&Poly> {
        self.items.last()
    }

    /// Borrows the two topmost polynomials, top first.
    pub fn top2(&self) -> Option<(&Poly, &Poly)> {
        if self.items.len() < 2 {
            return None;
        }
        Some((
            &self.items[self.items.len() - 1],
            &self.items[self.items.len() - 2],
        ))
    }
}

#[cfg(test)]
mod test {
    use super::Stack;
    use crate::poly::Poly;

    #[test]
    fn push_pop_is_lifo() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push(Poly::from(1));
        stack.push(Poly::from(2));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&Poly::from(2)));
        assert_eq!(stack.pop(), Some(Poly::from(2)));
        assert_eq!(stack.pop(), Some(Poly::from(1)));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn top2_is_top_first() {
        let mut stack = Stack::new();
        stack.push(Poly::from(1));
        assert_eq!(stack.top2(), None);
        stack.push(Poly::from(2));
        assert_eq!(stack.top2(), Some((&Poly::from(2), &Poly::from(1))));
    }
}
