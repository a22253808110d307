use cryptoreel::{Canvas, CompositionBuilder, Fps, SectionId};

fn main() -> anyhow::Result<()> {
    let comp = CompositionBuilder::new(
        "ThresholdShort",
        Fps::new(30, 1)?,
        Canvas {
            width: 1280,
            height: 720,
        },
    )
    .section(SectionId::Threshold, 120)
    .section(SectionId::Shamir, 120)
    .section(SectionId::Dkg, 150)
    .build()?;

    println!("{}", serde_json::to_string_pretty(&comp)?);
    Ok(())
}
