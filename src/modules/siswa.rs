use serde_json::Value;
use crate::base::api::Api;
use crate::utils::params::{Id, Params};
use crate::Error;

/// Get students, narrowed down by `id` and/or `kelas_id` when they are present
pub async fn get_siswa(api: &Api, id: Option<&Id>, kelas_id: Option<&Id>) -> Result<Value, Error> {
    let params = Params::new().with_id("id", id).with_id("kelas_id", kelas_id);
    api.call_api("getSiswa", Some(params)).await
}

pub async fn create_siswa(api: &Api, siswa_data: Params) -> Result<Value, Error> {
    api.call_api("createSiswa", Some(siswa_data)).await
}

pub async fn update_siswa(api: &Api, id: &Id, siswa_data: Params) -> Result<Value, Error> {
    let params = Params::new().with("id", id).merge(siswa_data);
    api.call_api("updateSiswa", Some(params)).await
}

pub async fn delete_siswa(api: &Api, id: &Id) -> Result<Value, Error> {
    api.call_api("deleteSiswa", Some(Params::new().with("id", id))).await
}
