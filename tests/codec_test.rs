// RGB565 codec properties over whole buffers
use gps_map_raster::raster::{self, Pixel, RasterBuffer, RasterError};
use proptest::collection::vec;
use proptest::prelude::*;

fn arb_buffer() -> impl Strategy<Value = RasterBuffer> {
    (1u32..12, 1u32..12).prop_flat_map(|(width, height)| {
        vec(any::<[u8; 3]>(), (width * height) as usize).prop_map(move |raw| {
            let pixels = raw.into_iter().map(Pixel::from).collect();
            RasterBuffer::new(width, height, pixels).expect("buffer init failed")
        })
    })
}

proptest! {
    #[test]
    fn roundtrip_only_loses_low_bits(buffer in arb_buffer()) {
        let decoded = raster::decode(&raster::encode(&buffer), buffer.width(), buffer.height())
            .expect("decode failed");

        prop_assert_eq!(decoded.dimensions(), buffer.dimensions());
        prop_assert_eq!(decoded.pixels().len(), buffer.pixels().len());
        for (original, restored) in buffer.pixels().iter().zip(decoded.pixels()) {
            prop_assert_eq!(original.red & 0xF8, restored.red);
            prop_assert_eq!(original.green & 0xFC, restored.green);
            prop_assert_eq!(original.blue & 0xF8, restored.blue);
        }
    }

    #[test]
    fn reencode_is_stable(buffer in arb_buffer()) {
        let first = raster::encode(&buffer);
        let decoded = raster::decode(&first, buffer.width(), buffer.height())
            .expect("decode failed");
        prop_assert_eq!(raster::encode(&decoded), first);
    }

    #[test]
    fn stream_length_is_two_bytes_per_pixel(buffer in arb_buffer()) {
        let stream = raster::encode(&buffer);
        prop_assert_eq!(stream.len(), 2 * buffer.width() as usize * buffer.height() as usize);
    }

    #[test]
    fn any_other_length_is_malformed(
        width in 1u32..10,
        height in 1u32..10,
        len in 0usize..250,
    ) {
        let expected = 2 * width as usize * height as usize;
        prop_assume!(len != expected);

        let stream = vec![0xA5u8; len];
        prop_assert_eq!(
            raster::decode(&stream, width, height),
            Err(RasterError::MalformedStream { expected, actual: len })
        );
    }

    #[test]
    fn single_pixel_matches_word_layout(red: u8, green: u8, blue: u8) {
        let word = raster::to_rgb565_word(Pixel::new(red, green, blue));
        prop_assert_eq!(word >> 11, (red >> 3) as u16);
        prop_assert_eq!((word >> 5) & 0x3F, (green >> 2) as u16);
        prop_assert_eq!(word & 0x1F, (blue >> 3) as u16);
    }
}

#[test]
fn white_pixel_sets_every_bit() {
    let white = Pixel::new(0xF8, 0xFC, 0xF8);
    let buffer = RasterBuffer::new(1, 1, vec![white]).expect("buffer init failed");
    assert_eq!(raster::encode(&buffer), vec![0xFF, 0xFF]);

    let decoded = raster::decode(&[0xFF, 0xFF], 1, 1).expect("decode failed");
    assert_eq!(decoded.get(0, 0), Some(Pixel::new(248, 252, 248)));
}

#[test]
fn decoded_stream_is_row_major() {
    // red, green / blue, black
    let stream = [0xF8, 0x00, 0x07, 0xE0, 0x00, 0x1F, 0x00, 0x00];
    let decoded = raster::decode(&stream, 2, 2).expect("decode failed");

    assert_eq!(decoded.get(0, 0), Some(Pixel::new(0xF8, 0, 0)));
    assert_eq!(decoded.get(1, 0), Some(Pixel::new(0, 0xFC, 0)));
    assert_eq!(decoded.get(0, 1), Some(Pixel::new(0, 0, 0xF8)));
    assert_eq!(decoded.get(1, 1), Some(Pixel::BLACK));
}
