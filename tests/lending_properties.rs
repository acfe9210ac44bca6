//! Property-based tests for borrow/return bookkeeping
//!
//! Random sequences of operations must never break the link between a book's
//! availability flag and the borrowed sets of the registered users.

use library_catalog::{
    config::{AppConfig, ReturnPolicy},
    models::UserRole,
    AppError, Services,
};
use proptest::prelude::*;

const BOOKS: usize = 4;
const USERS: u64 = 3;

#[derive(Debug, Clone)]
enum Op {
    Borrow { user: u64, book: usize },
    Return { user: u64, book: usize },
    Search(usize),
}

fn op() -> impl Strategy<Value = Op> {
    // User 0 and book index BOOKS are deliberately unknown.
    prop_oneof![
        (0..=USERS, 0..=BOOKS).prop_map(|(user, book)| Op::Borrow { user, book }),
        (0..=USERS, 0..=BOOKS).prop_map(|(user, book)| Op::Return { user, book }),
        (0..BOOKS).prop_map(Op::Search),
    ]
}

fn identifier(book: usize) -> String {
    format!("ISBN-{}", book)
}

fn setup(policy: ReturnPolicy) -> Services {
    let mut config = AppConfig::default();
    config.lending.return_policy = policy;
    let mut services = Services::new(config);
    for book in 0..BOOKS {
        services
            .add_book(&format!("Title {}", book), "Author", &identifier(book))
            .unwrap();
    }
    for user in 0..USERS {
        let role = if user % 2 == 0 { UserRole::Student } else { UserRole::Faculty };
        services.register_user(&format!("User {}", user), role);
    }
    services
}

fn invariant_holds(services: &Services) -> bool {
    let users = services.list_users();
    services.list_books().iter().all(|book| {
        let holders = users
            .iter()
            .filter(|u| u.has_borrowed(book.identifier()))
            .count();
        if book.is_available() {
            holders == 0
        } else {
            holders == 1
        }
    })
}

fn policy() -> impl Strategy<Value = ReturnPolicy> {
    prop_oneof![Just(ReturnPolicy::Permissive), Just(ReturnPolicy::BorrowerOnly)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: the availability invariant survives any operation sequence
    #[test]
    fn prop_invariant_holds(policy in policy(), ops in prop::collection::vec(op(), 0..60)) {
        let mut services = setup(policy);

        for op in ops {
            match op {
                Op::Borrow { user, book } => {
                    let _ = services.borrow(user, &identifier(book));
                }
                Op::Return { user, book } => {
                    let _ = services.return_book(user, &identifier(book));
                }
                Op::Search(book) => {
                    let query = format!("Title {}", book);
                    prop_assert_eq!(services.search(&query), services.search(&query));
                }
            }
            prop_assert!(invariant_holds(&services));
        }
    }

    /// Property: a failed request changes nothing
    #[test]
    fn prop_failures_do_not_mutate(
        policy in policy(),
        setup_ops in prop::collection::vec(op(), 0..30),
        probe in op()
    ) {
        let mut services = setup(policy);
        for op in setup_ops {
            match op {
                Op::Borrow { user, book } => { let _ = services.borrow(user, &identifier(book)); }
                Op::Return { user, book } => { let _ = services.return_book(user, &identifier(book)); }
                Op::Search(_) => {}
            }
        }

        let books = services.list_books();
        let users = services.list_users();
        let result = match probe {
            Op::Borrow { user, book } => services.borrow(user, &identifier(book)).map(|_| ()),
            Op::Return { user, book } => services.return_book(user, &identifier(book)).map(|_| ()),
            Op::Search(_) => Ok(()),
        };

        if result.is_err() {
            prop_assert_eq!(services.list_books(), books);
            prop_assert_eq!(services.list_users(), users);
        }
    }

    /// Property: borrowing an available book by a known user always succeeds
    /// and a second borrow of it always fails with AlreadyBorrowed
    #[test]
    fn prop_borrow_then_double_borrow(user in 1..=USERS, other in 1..=USERS, book in 0..BOOKS) {
        let mut services = setup(ReturnPolicy::Permissive);
        let receipt = services.borrow(user, &identifier(book))?;
        prop_assert_eq!(receipt.title, format!("Title {}", book));

        let second = services.borrow(other, &identifier(book));
        prop_assert!(
            matches!(second, Err(AppError::AlreadyBorrowed { .. })),
            "expected AlreadyBorrowed, got {:?}",
            second
        );

        services.return_book(user, &identifier(book))?;
        prop_assert!(services.list_books()[book].is_available());
    }
}
