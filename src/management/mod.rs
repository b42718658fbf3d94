mod resolver;

pub use resolver::NowPlayingResolver;
