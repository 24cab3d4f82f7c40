mod amount;

pub use amount::amount_edit;
