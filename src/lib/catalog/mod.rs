mod money;
mod product;
mod sender;

pub use money::Money;
pub use product::Product;
pub use sender::RecordSender;
