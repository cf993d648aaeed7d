//! Order book infrastructure module

pub mod order_book;

pub use order_book::OrderBook;
