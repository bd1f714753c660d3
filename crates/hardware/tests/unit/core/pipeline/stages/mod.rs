pub mod writeback;
