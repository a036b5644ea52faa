pub mod courses;

pub mod students;

pub use courses::configure_course_routes;
pub use students::configure_student_routes;
