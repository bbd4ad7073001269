#![cfg(feature = "zeroize")]

use std::cell::RefCell;
use std::rc::Rc;

use zeroize::Zeroize;

use flex_list::{ArrayList, LinkedList};

type Wiped = Rc<RefCell<Vec<[u8; 4]>>>;

#[derive(Debug, Clone)]
struct Secret {
    key: [u8; 4],
    wiped: Wiped,
}

impl Zeroize for Secret {
    fn zeroize(&mut self) {
        self.key.zeroize();
        self.wiped.borrow_mut().push(self.key);
    }
}

fn secrets(count: u8) -> (Vec<Secret>, Wiped) {
    let wiped = Wiped::default();
    let items = (1..=count)
        .map(|idx| Secret {
            key: [idx; 4],
            wiped: wiped.clone(),
        })
        .collect();
    (items, wiped)
}

#[test]
fn zeroize_array_list() {
    let (items, wiped) = secrets(3);
    let mut list = ArrayList::<Secret>::from(items);
    list.zeroize();
    assert!(list.is_empty());
    assert_eq!(list.capacity(), 3);
    assert_eq!(*wiped.borrow(), [[0u8; 4]; 3]);
}

#[test]
fn zeroize_linked_list() {
    let (items, wiped) = secrets(4);
    let mut list = LinkedList::<Secret>::from(items);
    list.zeroize();
    assert!(list.is_empty());
    assert_eq!(list.get_first().err(), Some(flex_list::ListError::Empty));
    assert_eq!(*wiped.borrow(), [[0u8; 4]; 4]);
}
