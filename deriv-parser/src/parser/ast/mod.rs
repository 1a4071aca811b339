pub mod binary;
pub mod call;
pub mod expr;
pub mod leaf;

pub use binary::Binary;
pub use call::{Call, Func};
pub use expr::{Expr, ExprIter};
pub use leaf::{Constant, Leaf};
