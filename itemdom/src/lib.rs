pub mod element;

pub use element::{Content, Element, find_by_data, find_element, find_element_mut};
