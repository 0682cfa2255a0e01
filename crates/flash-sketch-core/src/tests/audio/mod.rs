mod tone;
mod voice;
