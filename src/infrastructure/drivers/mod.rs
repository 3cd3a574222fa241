mod channels;

pub use channels::BufferedChannels;
