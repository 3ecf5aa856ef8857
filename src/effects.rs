pub mod dock;
pub mod pixel_dissolve;
pub mod scroll_stack;
