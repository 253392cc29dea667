mod item_window;

pub use item_window::ItemWindow;
