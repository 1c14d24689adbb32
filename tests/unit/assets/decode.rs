use super::*;

fn png_bytes(pixels: &[[u8; 4]], width: u32) -> Vec<u8> {
    let height = pixels.len() as u32 / width;
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = image::RgbaImage::from_raw(width, height, raw).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decodes_and_premultiplies() {
    let bytes = png_bytes(&[[255, 255, 255, 128], [10, 20, 30, 255]], 2);
    let frame = decode_frame(&bytes).unwrap();
    assert_eq!(frame.width, 2);
    assert_eq!(frame.height, 1);
    assert_eq!(&frame.rgba8_premul[0..4], &[128, 128, 128, 128]);
    assert_eq!(&frame.rgba8_premul[4..8], &[10, 20, 30, 255]);
}

#[test]
fn zero_alpha_zeroes_color_channels() {
    let bytes = png_bytes(&[[200, 100, 50, 0]], 1);
    let frame = decode_frame(&bytes).unwrap();
    assert_eq!(&frame.rgba8_premul[0..4], &[0, 0, 0, 0]);
}

#[test]
fn garbage_bytes_fail_without_panicking() {
    assert!(decode_frame(&[0u8; 16]).is_err());
}
