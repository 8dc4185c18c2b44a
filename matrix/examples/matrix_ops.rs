use dmat_matrix::{Matrix, MatrixResult};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_forest::ForestLayer;
use tracing_forest::util::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

fn main() -> MatrixResult<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    Registry::default()
        .with(env_filter)
        .with(ForestLayer::default())
        .init();

    let m = Matrix::new(2, 2, [1, 2, 3, 4]);
    let product = m.try_mul(&Matrix::identity(2))?;
    info!(dims = %product.dimensions(), "M * I =\n{product}");

    let v = Matrix::new(2, 1, [3.0f64, 4.0]);
    info!(norm = v.try_len()?, "norm of [3, 4]");

    let a = Matrix::new(3, 1, [1i64, 2, 3]);
    let b = Matrix::new(3, 1, [4i64, 5, 6]);
    info!(dot = a.try_dot_product(&b)?, "[1, 2, 3] . [4, 5, 6]");

    let mut rng = SmallRng::seed_from_u64(0);
    let x = Matrix::<f32>::rand(&mut rng, 64, 32);
    let y = Matrix::<f32>::rand(&mut rng, 32, 16);
    let xy = x.try_mul(&y)?.try_add(&Matrix::zeros(64, 16))?.scale(0.5);
    info!(dims = %xy.dimensions(), "random product");

    // Shape violations surface as errors from the checked API.
    if let Err(err) = x.try_mul(&x) {
        info!(%err, "rejected");
    }

    Ok(())
}
