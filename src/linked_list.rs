//! Singly linked list with insertion and deletion at either end.

use std::fmt;

use log::warn;

use crate::error::{DsaError, Result};

#[derive(Debug)]
struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

#[derive(Debug)]
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn push_front(&mut self, data: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { data, next }));
    }

    pub fn push_back(&mut self, data: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { data, next: None }));
    }

    pub fn pop_front(&mut self) -> Result<T> {
        match self.head.take() {
            Some(node) => {
                self.head = node.next;
                Ok(node.data)
            }
            None => {
                warn!("delete from an empty list");
                Err(DsaError::EmptyList)
            }
        }
    }

    pub fn pop_back(&mut self) -> Result<T> {
        // walk to the link that owns the last node; an empty list stops at head
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }

        cursor.take().map(|last| last.data).ok_or_else(|| {
            warn!("delete from an empty list");
            DsaError::EmptyList
        })
    }

    /// Counts nodes by walking the list.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.iter() {
            write!(f, "{item}->")?;
        }
        write!(f, "nil")
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    #[test]
    fn test_front_and_back_inserts() {
        let mut list = LinkedList::new();
        list.push_back(2);
        list.push_front(1);
        list.push_back(3);

        assert_eq!(list.to_string(), "1->2->3->nil");
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_empty_list() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.to_string(), "nil");
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_front(), Err(DsaError::EmptyList));
        assert_eq!(list.pop_back(), Err(DsaError::EmptyList));
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_at_both_ends() {
        let mut list: LinkedList<i32> = (1..=4).collect();
        assert_eq!(list.pop_front(), Ok(1));
        assert_eq!(list.pop_back(), Ok(4));
        assert_eq!(list.to_string(), "2->3->nil");
    }

    #[test]
    fn test_pop_back_single_node() {
        let mut list = LinkedList::new();
        list.push_front("only");
        assert_eq!(list.pop_back(), Ok("only"));
        assert!(list.is_empty());
        assert_eq!(list.to_string(), "nil");
    }

    #[test]
    fn test_pop_back_until_empty() {
        let mut list: LinkedList<i32> = (1..=3).collect();
        assert_eq!(list.pop_back(), Ok(3));
        assert_eq!(list.pop_back(), Ok(2));
        assert_eq!(list.pop_back(), Ok(1));
        assert_eq!(list.pop_back(), Err(DsaError::EmptyList));
        assert!(list.is_empty());

        list.push_back(9);
        assert_eq!(list.to_string(), "9->nil");
    }

    #[test]
    fn test_long_list_drops() {
        let mut list = LinkedList::new();
        for i in 0..200_000 {
            list.push_front(i);
        }
        assert_eq!(list.len(), 200_000);
        drop(list);
    }

    #[derive(Debug, Clone)]
    enum Op {
        PushFront(i16),
        PushBack(i16),
        PopFront,
        PopBack,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            any::<i16>().prop_map(Op::PushFront),
            any::<i16>().prop_map(Op::PushBack),
            Just(Op::PopFront),
            Just(Op::PopBack),
        ]
    }

    proptest! {
        #[test]
        fn test_matches_deque_model(ops in prop::collection::vec(op_strategy(), 0..100)) {
            let mut list = LinkedList::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushFront(v) => {
                        list.push_front(v);
                        model.push_front(v);
                    }
                    Op::PushBack(v) => {
                        list.push_back(v);
                        model.push_back(v);
                    }
                    Op::PopFront => prop_assert_eq!(list.pop_front().ok(), model.pop_front()),
                    Op::PopBack => prop_assert_eq!(list.pop_back().ok(), model.pop_back()),
                }
                prop_assert_eq!(list.len(), model.len());
                prop_assert!(list.iter().eq(model.iter()));
            }
        }
    }
}
