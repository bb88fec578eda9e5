use serde_json::Value;
use crate::base::api::Api;
use crate::utils::params::{Id, Params};
use crate::Error;

/// Get all classes, or only the one with `id` if it is present
pub async fn get_kelas(api: &Api, id: Option<&Id>) -> Result<Value, Error> {
    api.call_api("getKelas", Some(Params::new().with_id("id", id))).await
}

pub async fn create_kelas(api: &Api, kelas_data: Params) -> Result<Value, Error> {
    api.call_api("createKelas", Some(kelas_data)).await
}

/// Fields in `kelas_data` win over `id`, including an `id` field
pub async fn update_kelas(api: &Api, id: &Id, kelas_data: Params) -> Result<Value, Error> {
    let params = Params::new().with("id", id).merge(kelas_data);
    api.call_api("updateKelas", Some(params)).await
}

pub async fn delete_kelas(api: &Api, id: &Id) -> Result<Value, Error> {
    api.call_api("deleteKelas", Some(Params::new().with("id", id))).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_body(mock_server: &MockServer, body: &str, reply: Value) {
        Mock::given(method("POST"))
            .and(body_string(body))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply))
            .expect(1)
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_get_kelas_without_id() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=getKelas", json!([{"id": 1, "nama": "X-A"}, {"id": 2, "nama": "X-B"}])).await;

        let api = Api::with_url(mock_server.uri());
        let result = get_kelas(&api, None).await.unwrap();
        assert_eq!(result.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_kelas_with_id() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=getKelas&id=5", json!({"id": 5, "nama": "XII-IPA"})).await;

        let api = Api::with_url(mock_server.uri());
        let result = get_kelas(&api, Some(&Id::from(5))).await.unwrap();
        assert_eq!(result["nama"], "XII-IPA");
    }

    #[tokio::test]
    async fn test_get_kelas_zero_id_is_omitted() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=getKelas", json!([])).await;

        let api = Api::with_url(mock_server.uri());
        get_kelas(&api, Some(&Id::from(0))).await.unwrap();
    }

    #[tokio::test]
    async fn test_create_kelas() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=createKelas&nama=X-C&tingkat=10", json!({"status": "success", "id": 3})).await;

        let api = Api::with_url(mock_server.uri());
        let data = Params::from_json(&json!({"nama": "X-C", "tingkat": 10})).unwrap();
        let result = create_kelas(&api, data).await.unwrap();
        assert_eq!(result["id"], 3);
    }

    #[tokio::test]
    async fn test_update_kelas() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=updateKelas&id=3&nama=X-D", json!({"status": "success"})).await;

        let api = Api::with_url(mock_server.uri());
        update_kelas(&api, &Id::from(3), Params::from([("nama", "X-D")])).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_kelas_data_overrides_id() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=updateKelas&id=8&nama=X-E", json!({"status": "success"})).await;

        let api = Api::with_url(mock_server.uri());
        update_kelas(&api, &Id::from(3), Params::from([("id", "8"), ("nama", "X-E")])).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_kelas() {
        let mock_server = MockServer::start().await;
        mock_body(&mock_server, "action=deleteKelas&id=k-07", json!({"status": "success"})).await;

        let api = Api::with_url(mock_server.uri());
        let result = delete_kelas(&api, &Id::from("k-07")).await.unwrap();
        assert_eq!(result["status"], "success");
    }
}
