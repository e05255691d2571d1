pub mod view_transform;
