pub mod ray;
pub mod scene;
pub mod scheduler;
pub mod time;
