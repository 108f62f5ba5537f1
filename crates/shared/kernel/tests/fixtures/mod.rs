use std::sync::LazyLock;
use tessera_kernel::prelude::*;

pub static COLOR: LazyLock<EnumerationType> = LazyLock::new(|| EnumerationType::root("Color"));

/// `Color` with `RED`, `GREEN` and `BLUE`, carrying their RGB triples.
pub static COLORS: LazyLock<Enumeration<(u8, u8, u8)>> = LazyLock::new(|| {
    Enumeration::builder(&COLOR)
        .and_then(|builder| {
            builder
                .value("RED", (255, 0, 0))
                .value("GREEN", (0, 255, 0))
                .value("BLUE", (0, 0, 255))
                .documentation("Primary colors")
                .build()
        })
        .expect("Color enumeration builds once")
});

#[options_model]
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOptions {
    #[option(default = 4)]
    pub height: u32,
    #[option(default = "gray".to_owned())]
    pub color: String,
}

#[options_model]
#[derive(Debug, Clone, PartialEq)]
pub struct ThumbOptions {
    #[option(required)]
    pub label: String,
    pub visible: bool,
}

#[options_model]
#[derive(Debug, Clone, PartialEq)]
pub struct SliderOptions {
    #[option(default = 100.0)]
    pub width: f64,
    #[option(required)]
    pub name: String,
    pub tags: Vec<String>,
    pub track_options: TrackOptions,
    pub thumb_options: ThumbOptions,
}
