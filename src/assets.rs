/// Image decoding into [`PixelGrid`](decode::PixelGrid).
pub(crate) mod decode;
