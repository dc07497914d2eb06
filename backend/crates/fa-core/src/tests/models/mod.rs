mod face_descriptor;
mod user;
