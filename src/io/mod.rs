#![allow(non_snake_case)]

//! JSON read / write of matrices.
//!
//! Enabled with the `serde` feature (on by default).

use crate::algebra::*;
use crate::factor::FrozenMatrix;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::{Read, Write};
use std::{fs::File, io};

/// Trait for types that can be written to and read back from a JSON file.
pub trait MatrixJSONReadWrite: Sized {
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error>;
    fn read_from_file(file: &mut File) -> Result<Self, io::Error>;
}

// A frozen matrix is stored with the settings it factors with, so that
// reading it back reproduces the same decomposition.

#[derive(Serialize, Deserialize)]
#[serde(bound = "E: Serialize + DeserializeOwned, E::Real: Serialize + DeserializeOwned")]
struct JsonFrozenData<E: ElementT> {
    pub matrix: Matrix<E>,
    pub settings: AlgebraSettings<E::Real>,
}

impl<E> MatrixJSONReadWrite for Matrix<E>
where
    E: ElementT + Serialize + DeserializeOwned,
    E::Real: Serialize + DeserializeOwned,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json = serde_json::to_string(self)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let matrix: Matrix<E> = serde_json::from_str(&buffer)?;
        check_structure(&matrix)?;
        Ok(matrix)
    }
}

impl<E> MatrixJSONReadWrite for FrozenMatrix<E>
where
    E: ElementT + Serialize + DeserializeOwned,
    E::Real: Serialize + DeserializeOwned,
{
    fn write_to_file(&self, file: &mut File) -> Result<(), io::Error> {
        let json_data = JsonFrozenData {
            matrix: (**self).clone(),
            settings: self.settings().clone(),
        };
        let json = serde_json::to_string(&json_data)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn read_from_file(file: &mut File) -> Result<Self, io::Error> {
        let mut buffer = String::new();
        file.read_to_string(&mut buffer)?;
        let json_data: JsonFrozenData<E> = serde_json::from_str(&buffer)?;
        check_structure(&json_data.matrix)?;
        json_data
            .settings
            .validate()
            .map_err(|e| invalid_data(e.to_string()))?;
        Ok(json_data.matrix.freeze_with(json_data.settings))
    }
}

fn invalid_data(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

// deserialized storage must be internally consistent before any
// accessor is allowed to index into it
fn check_structure<E: ElementT>(matrix: &Matrix<E>) -> Result<(), io::Error> {
    match matrix {
        Matrix::Dense(A) => {
            if A.data.len() != A.m * A.n {
                return Err(invalid_data(format!(
                    "dense data length {} does not match size {}x{}",
                    A.data.len(),
                    A.m,
                    A.n
                )));
            }
        }
        Matrix::Diagonal(_) => {}
        Matrix::Tridiagonal(A) => {
            let n = A.diag.len();
            if A.lower.len() != n || A.upper.len() != n {
                return Err(invalid_data("tridiagonal bands differ in length".to_string()));
            }
        }
        Matrix::Sparse(A) => {
            A.check_format().map_err(|e| invalid_data(e.to_string()))?;
        }
    }
    Ok(())
}
