pub mod kelas;
pub mod siswa;
