mod audio;
mod duration;
mod support;
