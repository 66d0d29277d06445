pub mod format_ops;
