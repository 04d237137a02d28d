//! 工具定义与调度
//!
//! 每个工具的输入结构派生 JSON Schema，参数先按 schema 校验再反序列化

use jsonschema::JSONSchema;
use rust_decimal::Decimal;
use schemars::{schema_for, JsonSchema};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use stand_common::Pagination;
use stand_errors::AppError;
use stand_telemetry::record_tool_call;
use storefront::application::{
    CreateCustomerCommand, CreateProductCommand, ListCustomersQuery, ListProductsQuery,
    OnboardCustomerCommand, SalesReportQuery, ServiceHandler,
};
use storefront::domain::entities::{CustomerFilter, ProductFilter};
use storefront::domain::enums::ProductCategory;
use storefront::domain::services::{ReportRequest, ReportType};
use storefront::domain::value_objects::CustomerId;
use thiserror::Error;
use tracing::{debug, info, warn};

/// 工具调用错误
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidParams(String),

    #[error("Invalid tool schema for {tool}: {message}")]
    Schema { tool: &'static str, message: String },

    /// 业务失败，作为工具结果返回（`isError: true`）
    #[error("Tool failed: {0}")]
    Failed(Value),
}

impl ToolError {
    fn domain(error: AppError) -> Self {
        Self::Failed(json!({ "error": error.message() }))
    }
}

// ============================================================================
// 工具输入（字段文档会进入 schema 描述）
// ============================================================================

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GreetInput {
    pub name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCustomersInput {
    /// Filter by country name (case-insensitive)
    pub country: Option<String>,
    /// Maximum number of results
    pub limit: Option<u32>,
    /// Number of results to skip
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetCustomerInput {
    pub id: u32,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateCustomerInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    /// Defaults to USA
    pub country: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsInput {
    pub category: Option<ProductCategory>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetProductInput {
    /// Product ID such as `cavendish` or `red-banana`
    pub id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: ProductCategory,
    pub stock: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OnboardCustomerInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSalesReportInput {
    #[serde(rename = "type")]
    pub report_type: Option<ReportType>,
    /// First month to include, `YYYY-MM`
    pub start_date: Option<String>,
    /// Last month to include, `YYYY-MM`
    pub end_date: Option<String>,
}

// ============================================================================
// 注册表
// ============================================================================

struct RegisteredTool {
    name: &'static str,
    description: &'static str,
    schema: Value,
    validator: JSONSchema,
}

/// 已编译 schema 的工具集合
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn new() -> Result<Self, ToolError> {
        let tools = vec![
            register::<GreetInput>("greet", "Greet someone special")?,
            register::<GetCustomersInput>(
                "get-customers",
                "Get a list of all customers. Optionally filter by country or paginate results.",
            )?,
            register::<GetCustomerInput>(
                "get-customer",
                "Get detailed information about a specific customer by their numeric ID.",
            )?,
            register::<CreateCustomerInput>(
                "create-customer",
                "Create a new customer. Required: name, email. Optional: phone, address, city, state, zip, country (defaults to USA).",
            )?,
            register::<GetProductsInput>(
                "get-products",
                "Get a list of all banana products. Optional filters: category ('fresh', 'organic', 'specialty'), minPrice, maxPrice.",
            )?,
            register::<GetProductInput>(
                "get-product",
                "Get detailed information about a specific banana product by ID, including sales data.",
            )?,
            register::<CreateProductInput>(
                "create-product",
                "Create a new banana product. Required: name, price, category ('fresh', 'organic', 'specialty'). Optional: description, stock.",
            )?,
            register::<OnboardCustomerInput>(
                "onboard-customer",
                "Onboard a new customer with full details. All address fields are required. Returns the created customer with a welcome summary.",
            )?,
            register::<CreateSalesReportInput>(
                "create-sales-report",
                "Generate a sales report with revenue, top sellers, category breakdown, and customer data. Optional: type ('full' or 'summary'), startDate (YYYY-MM), endDate (YYYY-MM).",
            )?,
        ];

        Ok(Self { tools })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tools.iter().map(|t| t.name)
    }

    pub fn descriptors(&self) -> Vec<crate::protocol::ToolDescriptor> {
        self.tools
            .iter()
            .map(|t| crate::protocol::ToolDescriptor {
                name: t.name.to_string(),
                description: t.description.to_string(),
                input_schema: t.schema.clone(),
            })
            .collect()
    }

    /// 按 schema 校验参数，缺省参数视为空对象
    pub fn validate(&self, name: &str, arguments: &Value) -> Result<(), ToolError> {
        let tool = self
            .tools
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        if let Err(errors) = tool.validator.validate(arguments) {
            let messages: Vec<String> = errors.map(|e| e.to_string()).collect();
            return Err(ToolError::InvalidParams(messages.join("; ")));
        }
        Ok(())
    }

    /// 校验并执行工具，返回 JSON 结果
    pub async fn call(
        &self,
        handler: &ServiceHandler,
        name: &str,
        arguments: Value,
    ) -> Result<Value, ToolError> {
        let arguments = if arguments.is_null() {
            json!({})
        } else {
            arguments
        };
        self.validate(name, &arguments)?;
        debug!(tool = name, "Dispatching tool call");

        let result = dispatch(handler, name, arguments).await;
        let success = result.is_ok();
        record_tool_call(name, success);
        if success {
            info!(tool = name, "Tool call succeeded");
        } else {
            warn!(tool = name, "Tool call failed");
        }
        result
    }
}

fn register<T: JsonSchema>(
    name: &'static str,
    description: &'static str,
) -> Result<RegisteredTool, ToolError> {
    let schema = serde_json::to_value(schema_for!(T)).map_err(|e| ToolError::Schema {
        tool: name,
        message: e.to_string(),
    })?;
    let validator = JSONSchema::compile(&schema).map_err(|e| ToolError::Schema {
        tool: name,
        message: e.to_string(),
    })?;

    Ok(RegisteredTool {
        name,
        description,
        schema,
        validator,
    })
}

fn parse<T: DeserializeOwned>(arguments: Value) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, ToolError> {
    serde_json::to_value(value).map_err(|e| ToolError::domain(AppError::internal(e.to_string())))
}

fn decimal(field: &str, value: f64) -> Result<Decimal, ToolError> {
    Decimal::try_from(value)
        .map_err(|_| ToolError::InvalidParams(format!("{field} must be a finite number")))
}

async fn dispatch(
    handler: &ServiceHandler,
    name: &str,
    arguments: Value,
) -> Result<Value, ToolError> {
    match name {
        "greet" => {
            let input: GreetInput = parse(arguments)?;
            Ok(json!({ "message": format!("Hello, {}!", input.name) }))
        }
        "get-customers" => {
            let input: GetCustomersInput = parse(arguments)?;
            let query = ListCustomersQuery {
                filter: CustomerFilter {
                    country: input.country.filter(|c| !c.trim().is_empty()),
                },
                // 工具调用中 limit 为 0 视为不限制
                pagination: Pagination::new(
                    input.limit.filter(|l| *l > 0).map(|l| l as usize),
                    input.offset.map(|o| o as usize),
                ),
            };
            to_json(&handler.list_customers(query).await.map_err(ToolError::domain)?)
        }
        "get-customer" => {
            let input: GetCustomerInput = parse(arguments)?;
            to_json(
                &handler
                    .get_customer(CustomerId(input.id))
                    .await
                    .map_err(ToolError::domain)?,
            )
        }
        "create-customer" => {
            let input: CreateCustomerInput = parse(arguments)?;
            let cmd = CreateCustomerCommand {
                name: Some(input.name),
                email: Some(input.email),
                phone: input.phone,
                address: input.address,
                city: input.city,
                state: input.state,
                zip: input.zip,
                country: input.country,
            };
            to_json(&handler.create_customer(cmd).await.map_err(ToolError::domain)?)
        }
        "get-products" => {
            let input: GetProductsInput = parse(arguments)?;
            let query = ListProductsQuery {
                filter: ProductFilter {
                    category: input.category,
                    min_price: input.min_price.map(|p| decimal("minPrice", p)).transpose()?,
                    max_price: input.max_price.map(|p| decimal("maxPrice", p)).transpose()?,
                },
            };
            to_json(&handler.list_products(query).await.map_err(ToolError::domain)?)
        }
        "get-product" => {
            let input: GetProductInput = parse(arguments)?;
            to_json(&handler.get_product(&input.id).await.map_err(ToolError::domain)?)
        }
        "create-product" => {
            let input: CreateProductInput = parse(arguments)?;
            let cmd = CreateProductCommand {
                name: Some(input.name),
                description: input.description,
                price: Some(decimal("price", input.price)?),
                category: Some(input.category.as_str().to_string()),
                stock: input.stock,
            };
            to_json(&handler.create_product(cmd).await.map_err(ToolError::domain)?)
        }
        "onboard-customer" => {
            let input: OnboardCustomerInput = parse(arguments)?;
            let cmd = OnboardCustomerCommand {
                name: input.name,
                email: input.email,
                phone: input.phone,
                address: input.address,
                city: input.city,
                state: input.state,
                zip: input.zip,
                country: input.country,
            };
            let result = handler.onboard_customer(cmd).await.map_err(|e| {
                ToolError::Failed(json!({ "success": false, "error": e.message() }))
            })?;
            to_json(&result)
        }
        "create-sales-report" => {
            let input: CreateSalesReportInput = parse(arguments)?;
            let query = SalesReportQuery {
                request: ReportRequest::new(
                    input.report_type.unwrap_or_default(),
                    input.start_date,
                    input.end_date,
                ),
            };
            to_json(&handler.sales_report(query).await.map_err(ToolError::domain)?)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lists_all_tools() {
        let registry = ToolRegistry::new().unwrap();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "greet",
                "get-customers",
                "get-customer",
                "create-customer",
                "get-products",
                "get-product",
                "create-product",
                "onboard-customer",
                "create-sales-report",
            ]
        );
    }

    #[test]
    fn test_schema_rejects_missing_required() {
        let registry = ToolRegistry::new().unwrap();
        let err = registry
            .validate("create-product", &json!({ "name": "Golden Banana" }))
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
    }

    #[test]
    fn test_schema_rejects_bad_enum() {
        let registry = ToolRegistry::new().unwrap();
        let err = registry
            .validate(
                "create-product",
                &json!({ "name": "Golden", "price": 1.5, "category": "frozen" }),
            )
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));

        assert!(registry
            .validate("get-products", &json!({ "category": "organic" }))
            .is_ok());
    }

    #[test]
    fn test_unknown_tool() {
        let registry = ToolRegistry::new().unwrap();
        assert!(matches!(
            registry.validate("delete-everything", &json!({})),
            Err(ToolError::UnknownTool(_))
        ));
    }
}
