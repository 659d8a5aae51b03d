//! Tests for deriving PBR maps from an albedo photograph.

use std::path::Path;

use signal_lost_textures::derive::{derive_from_albedo, DeriveError};

fn write_solid_image(path: &Path, size: u32, rgb: [u8; 3]) {
    let img = image::RgbImage::from_pixel(size, size, image::Rgb(rgb));
    img.save(path).unwrap();
}

#[test]
fn test_solid_gray_photo() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("solid_gray.png");
    write_solid_image(&input, 256, [128, 128, 128]);

    let out = dir.path().join("derived");
    let files = derive_from_albedo(&input, &out, 1.0).unwrap();

    let names: Vec<_> = files.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["normal", "roughness", "metallic", "ao"]);
    assert!(!out.join("albedo.png").exists());

    let metallic = image::open(out.join("metallic.png")).unwrap().to_luma8();
    assert!(metallic.pixels().all(|p| p.0[0] == 0));

    let gray = 128.0 / 255.0;
    let expected_roughness = ((1.0 - gray * 0.5_f64).clamp(0.2, 0.9) * 255.0) as u8;
    let roughness = image::open(out.join("roughness.png")).unwrap().to_luma8();
    assert!(roughness.pixels().all(|p| p.0[0] == expected_roughness));

    let ao = image::open(out.join("ao.png")).unwrap().to_luma8();
    let first = ao.get_pixel(0, 0).0[0];
    assert!(ao.pixels().all(|p| p.0[0] == first), "AO should be uniform");
    assert!(first >= (0.3 * 255.0) as u8);

    let normal = image::open(out.join("normal.png")).unwrap().to_rgb8();
    assert_eq!((normal.width(), normal.height()), (256, 256));
    assert!(normal.pixels().all(|p| p.0 == [128, 128, 255]));
}

#[test]
fn test_missing_photo_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("derived");
    let result = derive_from_albedo(&dir.path().join("nope.png"), &out, 1.0);

    assert!(matches!(result, Err(DeriveError::Decode { .. })));
    assert!(!out.exists(), "no output directory should be created");
}

#[test]
fn test_garbage_photo_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("garbage.png");
    std::fs::write(&input, b"definitely not a png").unwrap();

    let out = dir.path().join("derived");
    let result = derive_from_albedo(&input, &out, 1.0);
    assert!(matches!(result, Err(DeriveError::Decode { .. })));
    assert!(!out.exists());
}

#[test]
fn test_bmp_and_tga_sources_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    for ext in ["bmp", "tga"] {
        let input = dir.path().join(format!("source.{}", ext));
        write_solid_image(&input, 32, [90, 120, 150]);

        let out = dir.path().join(format!("derived_{}", ext));
        let files = derive_from_albedo(&input, &out, 1.0)
            .unwrap_or_else(|e| panic!("{} source rejected: {}", ext, e));
        assert_eq!(files.len(), 4, "{}", ext);
        assert!(out.join("normal.png").is_file(), "{}", ext);
    }
}
