// Element ids and CSS names shared by the browser shell.

// Page structure
pub const STAGE_ID: &str = "stage"; // container the frames are appended to
pub const GALLERY_ID: &str = "gallery"; // section whose scroll scrubs the stage
pub const PRODUCT_NAME_ID: &str = "productName";
pub const PRODUCT_DESC_ID: &str = "productDesc";
pub const YEAR_ID: &str = "year";

// Frame markup
pub const FRAME_CLASS: &str = "frame";
pub const SNEAKER_CLASS: &str = "sneaker";
pub const FRAME_INDEX_ATTR: &str = "data-index";

// Ambient hue custom property on the document element
pub const HUE_PROPERTY: &str = "--bgHue";

// Frame wrapper transform: promotes each frame to its own compositing layer
pub const FRAME_LAYER_TRANSFORM: &str = "translateZ(0)";
