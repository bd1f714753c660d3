pub mod register_names;
