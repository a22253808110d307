use cryptoreel::{Rgb8, builtin};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let id = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "MangaCryptoExplainer".to_string());
    let comp = builtin::find(&id).ok_or_else(|| anyhow::anyhow!("unknown composition '{id}'"))?;

    let stops = [
        Rgb8::from_hex("#1a1a2e")?,
        Rgb8::from_hex("#16213e")?,
        Rgb8::from_hex("#0f3460")?,
        Rgb8::from_hex("#533483")?,
    ];

    for f in (0..comp.duration()).step_by(30) {
        let state = comp.evaluate(f as i64)?;
        let p = state.position;
        let bg = cryptoreel::band(p.overall_progress, stops.len())?
            .blend(&stops)
            .unwrap_or(stops[0]);
        println!(
            "frame {f:>5}  {:<13} local {:>4}  section {:>5.1}%  overall {:>5.1}%  enter {:.3}  bg {}",
            p.section_id.to_string(),
            p.section_local_frame,
            p.section_progress * 100.0,
            p.overall_progress * 100.0,
            state.motion.entrance()?,
            bg.to_hex(),
        );
    }

    Ok(())
}
