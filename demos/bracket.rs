//! Generates lightening-hole patterns for an L bracket and writes them as SVG.
//!
//! Run with: cargo run --example bracket [output_dir]
//!
//! Set `RUST_LOG=lightweb=debug` to see the pipeline stages.

use lightweb::io::pattern_to_svg_document;
use lightweb::pattern::{PatternConfigBuilder, PatternGenerator, PatternOutcome, PatternRegion};
use lightweb::polygon::{polygon_area, OffsetStrategy};
use lightweb::{Circle2, Point2};

use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("screenshots"));
    std::fs::create_dir_all(&out_dir)?;

    let boundary = vec![
        Point2::new(0.0, 0.0),
        Point2::new(180.0, 0.0),
        Point2::new(180.0, 60.0),
        Point2::new(70.0, 60.0),
        Point2::new(70.0, 140.0),
        Point2::new(0.0, 140.0),
    ];
    let region = PatternRegion::new(boundary.clone())
        .with_circle(Circle2::from_coords(20.0, 20.0, 5.0))
        .with_circle(Circle2::from_coords(160.0, 30.0, 5.0))
        .with_circle(Circle2::from_coords(35.0, 120.0, 5.0))
        .with_polygon(vec![
            Point2::new(95.0, 15.0),
            Point2::new(125.0, 15.0),
            Point2::new(125.0, 45.0),
            Point2::new(95.0, 45.0),
        ]);

    let variants = [
        ("bracket_sharp", 0.0, OffsetStrategy::Scale),
        ("bracket_rounded", 2.0, OffsetStrategy::Scale),
        ("bracket_edge_offset", 2.0, OffsetStrategy::EdgeIntersection),
    ];

    let plate_area = polygon_area(&boundary);
    for (name, radius, strategy) in variants {
        let config = PatternConfigBuilder::new()
            .seed_count(70)?
            .rib_width(3.0)?
            .edge_margin(4.0)?
            .corner_radius(radius)?
            .offset_strategy(strategy)
            .build()?;

        let mut report = |done: usize, total: usize| {
            if done == total {
                println!("{name}: processed {total} cells");
            }
        };
        let outcome = PatternGenerator::new(config).generate(&region, &mut report)?;

        match outcome {
            PatternOutcome::Cells(pattern) => {
                let path = out_dir.join(format!("{name}.svg"));
                std::fs::write(&path, pattern_to_svg_document(&pattern, &boundary))?;
                println!(
                    "{name}: {} holes, {:.1}% material removed -> {}",
                    pattern.len(),
                    100.0 * pattern.removed_area() / plate_area,
                    path.display()
                );
            }
            PatternOutcome::NoCells { seeds } => {
                println!("{name}: {seeds} seeds placed but no hole survived");
            }
            PatternOutcome::NoSeeds => println!("{name}: no room for seeds"),
        }
    }

    Ok(())
}
