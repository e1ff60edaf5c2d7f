use exhume::{convert_soap_to_rest, AuthStrategy, ConversionOptions, HttpMethod};
use indoc::indoc;
use pretty_assertions::assert_eq;

const BANKING_WSDL: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <wsdl:definitions name="AccountService"
                      xmlns:wsdl="http://schemas.xmlsoap.org/wsdl/"
                      xmlns:soap="http://schemas.xmlsoap.org/wsdl/soap/"
                      xmlns:xsd="http://www.w3.org/2001/XMLSchema"
                      xmlns:tns="http://bank.example.com/accounts">
      <wsdl:types>
        <xsd:schema targetNamespace="http://bank.example.com/accounts">
          <xsd:complexType name="Account">
            <xsd:sequence>
              <xsd:element name="accountId" type="xsd:string" minOccurs="1"/>
              <xsd:element name="balance" type="xsd:decimal" minOccurs="0"/>
              <xsd:element name="holders" type="xsd:string" maxOccurs="unbounded"/>
            </xsd:sequence>
          </xsd:complexType>
        </xsd:schema>
      </wsdl:types>
      <wsdl:message name="GetAccountRequest">
        <wsdl:part name="accountId" type="xsd:string"/>
      </wsdl:message>
      <wsdl:message name="GetAccountResponse">
        <wsdl:part name="account" type="tns:Account"/>
      </wsdl:message>
      <wsdl:message name="CreateAccountRequest">
        <wsdl:part name="holderName" type="xsd:string"/>
        <wsdl:part name="initialBalance" type="xsd:decimal"/>
      </wsdl:message>
      <wsdl:message name="CreateAccountResponse">
        <wsdl:part name="accountId" type="xsd:string"/>
      </wsdl:message>
      <wsdl:message name="CloseAccountFault">
        <wsdl:part name="reason" type="xsd:string"/>
      </wsdl:message>
      <wsdl:portType name="AccountPortType">
        <wsdl:operation name="GetAccount">
          <wsdl:input message="tns:GetAccountRequest"/>
          <wsdl:output message="tns:GetAccountResponse"/>
        </wsdl:operation>
        <wsdl:operation name="CreateAccount">
          <wsdl:input message="tns:CreateAccountRequest"/>
          <wsdl:output message="tns:CreateAccountResponse"/>
        </wsdl:operation>
        <wsdl:operation name="CloseAccount">
          <wsdl:input message="tns:GetAccountRequest"/>
          <wsdl:output message="tns:GetAccountResponse"/>
          <wsdl:fault message="tns:CloseAccountFault"/>
        </wsdl:operation>
      </wsdl:portType>
      <wsdl:service name="AccountService"/>
    </wsdl:definitions>
"#};

#[test]
fn banking_wsdl_converts_end_to_end() {
    let result = convert_soap_to_rest(BANKING_WSDL, &ConversionOptions::default()).unwrap();

    assert_eq!(result.endpoints.len(), 3);

    let get = &result.endpoints[0];
    assert_eq!(get.method, HttpMethod::Get);
    assert_eq!(get.path, "/accounts/{id}");
    assert_eq!(get.operation_id, "getAccount");
    assert!(get.request_body.is_none());

    let create = &result.endpoints[1];
    assert_eq!(create.method, HttpMethod::Post);
    assert_eq!(create.path, "/accounts");
    let body = create.request_body.as_ref().unwrap();
    let schema = &body.content["application/json"]["schema"];
    assert!(schema["properties"]["holderName"].is_object());
    assert!(schema["properties"]["initialBalance"].is_object());

    let close = &result.endpoints[2];
    assert_eq!(close.method, HttpMethod::Delete);
    assert_eq!(close.path, "/accounts/{id}");
    assert!(close.responses.contains_key("422"));

    // Complex type extracted by the independent raw-text pass.
    assert_eq!(result.complex_types.len(), 1);
    assert_eq!(result.complex_types[0].name, "Account");

    let spec = &result.open_api_spec;
    assert_eq!(spec.info.title, "AccountService");
    assert!(spec.paths.contains_key("/accounts"));
    assert!(spec.paths.contains_key("/accounts/{id}"));
    let schemas = spec.components.as_ref().unwrap().schemas.as_ref().unwrap();
    assert!(schemas.contains_key("Account"));

    assert_eq!(result.migration_plan.len(), 4);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("1 complex types detected")));
}

#[test]
fn get_user_operation_maps_to_single_resource_get() {
    let wsdl = indoc! {r#"
        <definitions xmlns:tns="http://example.com">
          <message name="GetUserRequest">
            <part name="userId" type="xsd:string"/>
          </message>
          <message name="GetUserResponse">
            <part name="user" type="tns:User"/>
          </message>
          <portType name="UserPortType">
            <operation name="GetUser">
              <input message="tns:GetUserRequest"/>
              <output message="tns:GetUserResponse"/>
            </operation>
          </portType>
        </definitions>
    "#};
    let result = convert_soap_to_rest(wsdl, &ConversionOptions::default()).unwrap();
    assert_eq!(result.endpoints[0].method, HttpMethod::Get);
    assert_eq!(result.endpoints[0].path, "/users/{id}");
    assert_eq!(result.endpoints[0].parameters[0].name, "id");
}

#[test]
fn create_user_operation_maps_to_post_with_username_property() {
    let wsdl = indoc! {r#"
        <definitions xmlns:tns="http://example.com">
          <message name="CreateUserRequest">
            <part name="username" type="xsd:string"/>
          </message>
          <portType name="UserPortType">
            <operation name="CreateUser">
              <input message="tns:CreateUserRequest"/>
              <output message="tns:CreateUserResponse"/>
            </operation>
          </portType>
        </definitions>
    "#};
    let result = convert_soap_to_rest(wsdl, &ConversionOptions::default()).unwrap();
    let endpoint = &result.endpoints[0];
    assert_eq!(endpoint.method, HttpMethod::Post);
    assert_eq!(endpoint.path, "/users");
    let body = endpoint.request_body.as_ref().unwrap();
    assert!(body.content["application/json"]["schema"]["properties"]["username"].is_object());
}

#[test]
fn malformed_xml_rejects_without_partial_result() {
    let err = convert_soap_to_rest("<definitions><oops", &ConversionOptions::default());
    assert!(err.is_err());
    let message = err.unwrap_err().to_string();
    assert!(message.contains("SOAP to REST conversion failed"));
}

#[test]
fn service_name_override_wins() {
    let options = ConversionOptions {
        service_name: Some("LedgerApi".to_string()),
        ..Default::default()
    };
    let result = convert_soap_to_rest(BANKING_WSDL, &options).unwrap();
    assert_eq!(result.open_api_spec.info.title, "LedgerApi");
}

#[test]
fn none_auth_produces_no_security_schemes() {
    let options = ConversionOptions {
        auth_strategy: AuthStrategy::None,
        ..Default::default()
    };
    let result = convert_soap_to_rest(BANKING_WSDL, &options).unwrap();
    let components = result.open_api_spec.components.as_ref().unwrap();
    assert!(components.security_schemes.is_none());
    // Schemas keep components alive even without auth.
    assert!(components.schemas.is_some());
}

#[test]
fn conversion_is_deterministic() {
    let options = ConversionOptions::default();
    let first = convert_soap_to_rest(BANKING_WSDL, &options).unwrap();
    let second = convert_soap_to_rest(BANKING_WSDL, &options).unwrap();
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn legacy_operation_names_emit_cross_chamber_suggestion() {
    let wsdl = indoc! {r#"
        <definitions>
          <portType name="P">
            <operation name="FetchLegacyRecords">
              <input message="In"/>
              <output message="Out"/>
            </operation>
          </portType>
        </definitions>
    "#};
    let result = convert_soap_to_rest(wsdl, &ConversionOptions::default()).unwrap();
    assert!(result
        .cross_chamber_suggestions
        .iter()
        .any(|s| s.contains("Legacy Reanimator")));
}
