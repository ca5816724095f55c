//! # heng-codec
//!
//! Heng 定点音频解码库, 提供 AAC 双声道频谱重建核心.
//!
//! 本 crate 覆盖解码管线中 Huffman/scalefactor 解码之后、反量化与
//! IMDCT 之前的频谱处理阶段; 码流解析与时域合成由上下游承担.

pub mod decoders;
