//! End-to-end generation tests: files on disk, determinism, map invariants.

use std::path::Path;

use signal_lost_textures::generate::{generate_all, generate_material, GenerateOptions};
use signal_lost_textures::material::{GenerationContext, MaterialKind, MaterialOutput};
use signal_lost_textures::noise::Resampler;

fn read_png(path: &Path) -> image::DynamicImage {
    image::open(path).unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn test_concrete_writes_five_maps_with_zero_metallic() {
    let out = tempfile::tempdir().unwrap();
    let ctx = GenerationContext::new(256, 123);
    let report = generate_material(MaterialKind::Concrete, &ctx, out.path()).unwrap();

    let dir = out.path().join("concrete");
    assert_eq!(report.dir, dir);
    for name in ["albedo", "normal", "roughness", "metallic", "ao"] {
        assert!(dir.join(format!("{}.png", name)).is_file(), "missing {}.png", name);
    }
    assert_eq!(report.files.len(), 5);

    let metallic = read_png(&dir.join("metallic.png")).to_luma8();
    assert!(metallic.pixels().all(|p| p.0[0] == 0), "concrete metallic must be zero");
}

#[test]
fn test_ice_albedo_is_blue_biased() {
    let ctx = GenerationContext::new(256, 789);
    let MaterialOutput::Set(set) = MaterialKind::Ice.generate(&ctx) else {
        panic!("ice should produce a texture set");
    };
    let red = set.albedo.channel_mean(0);
    let blue = set.albedo.channel_mean(2);
    assert!(blue > red, "expected blue ({}) > red ({})", blue, red);
}

#[test]
fn test_image_shapes_on_disk() {
    let out = tempfile::tempdir().unwrap();
    let ctx = GenerationContext::new(64, 42);
    generate_material(MaterialKind::Metal, &ctx, out.path()).unwrap();

    let dir = out.path().join("metal_panel");
    for (name, channels) in [
        ("albedo", 3),
        ("normal", 3),
        ("roughness", 1),
        ("metallic", 1),
        ("ao", 1),
    ] {
        let img = read_png(&dir.join(format!("{}.png", name)));
        assert_eq!((img.width(), img.height()), (64, 64), "{}", name);
        assert_eq!(img.color().channel_count(), channels, "{}", name);
    }
}

#[test]
fn test_static_writes_single_image() {
    let out = tempfile::tempdir().unwrap();
    let options = GenerateOptions {
        static_size: 32,
        ..GenerateOptions::default()
    };
    let reports = generate_all(&[MaterialKind::Static], &options, out.path()).unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].files.len(), 1);
    let path = out.path().join("screen_static").join("static.png");
    assert!(path.is_file());
    let img = read_png(&path);
    assert_eq!((img.width(), img.height()), (32, 32));
}

// ============================================================================
// Determinism Tests
// ============================================================================

#[test]
fn test_same_seed_same_bytes() {
    let a = tempfile::tempdir().unwrap();
    let b = tempfile::tempdir().unwrap();
    let ctx = GenerationContext::new(96, 7);

    for kind in MaterialKind::ALL {
        let ra = generate_material(kind, &ctx, a.path()).unwrap();
        let rb = generate_material(kind, &ctx, b.path()).unwrap();
        for (fa, fb) in ra.files.iter().zip(&rb.files) {
            assert_eq!(fa.hash, fb.hash, "{} {} differs", kind, fa.name);
            let bytes_a = std::fs::read(&fa.path).unwrap();
            let bytes_b = std::fs::read(&fb.path).unwrap();
            assert_eq!(bytes_a, bytes_b);
        }
    }
}

#[test]
fn test_different_seed_different_albedo() {
    let a = MaterialKind::Metal.generate(&GenerationContext::new(64, 1));
    let b = MaterialKind::Metal.generate(&GenerationContext::new(64, 2));
    assert_ne!(a, b);
}

#[test]
fn test_parallel_matches_sequential() {
    let seq_dir = tempfile::tempdir().unwrap();
    let par_dir = tempfile::tempdir().unwrap();
    let mut options = GenerateOptions {
        size: 64,
        static_size: 32,
        seed: 42,
        ..GenerateOptions::default()
    };

    let sequential = generate_all(&MaterialKind::ALL, &options, seq_dir.path()).unwrap();
    options.parallel = true;
    let parallel = generate_all(&MaterialKind::ALL, &options, par_dir.path()).unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.material, p.material);
        assert_eq!(s.seed, p.seed);
        let hashes = |r: &signal_lost_textures::MaterialReport| {
            r.files.iter().map(|f| f.hash.clone()).collect::<Vec<_>>()
        };
        assert_eq!(hashes(s), hashes(p), "{} differs between runs", s.material);
    }
}

#[test]
fn test_recipes_do_not_share_random_state() {
    // Running another recipe first must not change the output.
    let ctx = GenerationContext::new(48, 9);
    let alone = MaterialKind::Snow.generate(&ctx);
    let _ = MaterialKind::Ice.generate(&ctx);
    let after = MaterialKind::Snow.generate(&ctx);
    assert_eq!(alone, after);
}

// ============================================================================
// Map Invariants
// ============================================================================

#[test]
fn test_metal_metallic_clamped() {
    for seed in [0, 42, 9001] {
        let ctx = GenerationContext::new(128, seed);
        let MaterialOutput::Set(set) = MaterialKind::Metal.generate(&ctx) else {
            panic!("metal should produce a texture set");
        };
        let cap = (0.95 * 255.0) as u8;
        assert!(set.metallic.data.iter().all(|&m| m <= cap), "seed {}", seed);
    }
}

#[test]
fn test_block_resampler_still_produces_valid_set() {
    let ctx = GenerationContext::new(64, 3).with_resampler(Resampler::BlockReplicate);
    let MaterialOutput::Set(set) = MaterialKind::Concrete.generate(&ctx) else {
        panic!("concrete should produce a texture set");
    };
    assert_eq!(set.albedo.data.len(), 64 * 64 * 3);
    assert_ne!(
        set,
        match MaterialKind::Concrete.generate(&GenerationContext::new(64, 3)) {
            MaterialOutput::Set(s) => s,
            MaterialOutput::Single(_) => unreachable!(),
        }
    );
}

#[test]
fn test_report_serializes_with_hashes() {
    let out = tempfile::tempdir().unwrap();
    let ctx = GenerationContext::new(32, 9);
    let report = generate_material(MaterialKind::Snow, &ctx, out.path()).unwrap();

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["material"], "snow");
    assert_eq!(json["seed"], 9);
    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 5);
    for file in files {
        assert_eq!(file["hash"].as_str().unwrap().len(), 64, "blake3 hex digest");
    }
}
