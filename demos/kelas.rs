use sekolah_rs::base::auth::login;
use sekolah_rs::modules::kelas::get_kelas;
use sekolah_rs::modules::siswa::get_siswa;
use sekolah_rs::{Api, Error, Id};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sekolah_rs=debug")))
        .init();

    // Uses SEKOLAH_API_URL if set
    let api = match Api::from_env() {
        Ok(api) => api,
        Err(e) => panic!("Error creating api: {}", e),
    };

    println!("Please enter your username: ");
    let mut username = String::new();
    std::io::stdin().read_line(&mut username).unwrap();

    println!("Enter your password: ");
    let mut password = String::new();
    std::io::stdin().read_line(&mut password).unwrap();

    println!("Logging in...");
    match login(&api, username.trim(), password.trim()).await {
        Ok(reply) => println!("Backend says: {}", reply),
        Err(Error::Request(e)) if e.is_decode() => {
            println!("The backend didn't answer with JSON. Is '{}' the right endpoint?", api.url());
            return;
        }
        Err(e) => {
            println!("Something went wrong while trying to login: {}", e);
            return;
        }
    }

    let kelas = get_kelas(&api, None).await.unwrap();
    println!("Classes: {:#}", kelas);

    println!("Please enter a class id to list its students (leave empty for all): ");
    let mut kelas_id = String::new();
    std::io::stdin().read_line(&mut kelas_id).unwrap();
    let kelas_id = Id::from(kelas_id.trim());

    let siswa = get_siswa(&api, None, Some(&kelas_id)).await.unwrap();
    println!("Students: {:#}", siswa);
}
