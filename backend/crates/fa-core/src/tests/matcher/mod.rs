mod distance;
mod face_matcher;
