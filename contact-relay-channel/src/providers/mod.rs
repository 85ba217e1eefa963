//! Delivery channel implementations

mod formspree;

pub use formspree::FormspreeChannel;
