use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ItemId);

/// One dish on the board. Constructed only by [`crate::store::MenuStore`];
/// `price` is always finite and positive once an item exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub course: String,
}

/// Raw form input for a new dish, exactly as typed. Conversion and
/// validation happen once, when the draft is submitted to the store.
#[derive(Debug, Clone, Default)]
pub struct DishDraft {
    pub name: String,
    pub price: String,
    pub course: String,
}

impl DishDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        course: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
            course: course.into(),
        }
    }
}
