mod assets;
mod refs;
mod releases;
