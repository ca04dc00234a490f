use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use vecmat::{Matrix33, Vector3};

    #[derive(Debug, Parser)]
    #[command(about = "Generic 3D vector and matrix arithmetic", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Run a short tour of vector arithmetic and print each result
        Demo,
        /// Compute the determinant and inverse of a 3x3 matrix
        Invert {
            /// The nine cells of the matrix in row-major order
            #[arg(num_args = 9, value_name = "CELL", allow_negative_numbers = true)]
            cells: Vec<f64>,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Demo => {
                demo();
                Ok(())
            }
            Command::Invert { cells } => invert(&cells),
        }
    }

    fn demo() {
        let mut a = Vector3::new(1.0_f32, 2.0, 3.0);
        let b = Vector3::new(1_i32, 2, 3);
        let c = Vector3::same(4_i32);
        let d = Vector3::new(1_i32, 2, 4);
        let e = Vector3::<f64>::zeros();

        println!("{c}");
        println!("{d}");
        println!("{}", a == b);
        println!("{a}");
        println!("{}", a & a);
        println!("{}", a ^ a);
        a = a / 20_i32;
        a = 20_i32 / a;
        println!("{a}");
        println!("{e}");
    }

    fn invert(cells: &[f64]) -> Result<()> {
        let Ok(cells) = <[f64; 9]>::try_from(cells) else {
            anyhow::bail!("Expected exactly 9 cells, got {}", cells.len());
        };

        let matrix = Matrix33::from_flat(cells);
        log::debug!("Parsed matrix {matrix}");

        println!("matrix:      {matrix}");
        println!("determinant: {}", matrix.determinant());
        println!("inverse:     {}", matrix.inverse()?);
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
