use std::time::Instant;

use bls12_381::Scalar;
use pubdata_kzg::{Context, TrustedSetup};
use tracing_forest::{util::LevelFilter, ForestLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn dummy_pubdata(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 0x70) as u8).collect()
}

fn main() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let start = Instant::now();
    let trusted_setup = TrustedSetup::insecure_from_secret(&Scalar::from(42u64));
    let ctx = Context::new(&trusted_setup);
    println!("built insecure context in {:?}", start.elapsed());

    let pubdata = dummy_pubdata(150_000);

    let start = Instant::now();
    let (artifacts, output) = ctx
        .process_pubdata(&pubdata)
        .expect("failed to process pubdata");
    println!("processed {} blobs in {:?}", artifacts.len(), start.elapsed());

    for (index, blob) in artifacts.iter().enumerate() {
        println!("blob {index}");
        println!("  versioned hash: 0x{}", hex::encode(blob.versioned_hash));
        println!("  x:              0x{}", hex::encode(blob.x));
        println!("  y:              0x{}", hex::encode(blob.y));
        println!("  digest:         0x{}", hex::encode(blob.public_input_digest));

        ctx.verify_public_input(
            blob.versioned_hash,
            blob.commitment,
            blob.x,
            blob.y,
            blob.proof,
            blob.public_input_digest,
        )
        .expect("artifacts must verify");
    }

    println!("auxiliary output: 0x{}", hex::encode(output.to_bytes()));
}
