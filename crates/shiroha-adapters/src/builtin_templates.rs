//! Built-in Gin project skeletons.
//!
//! Two variants ship with Shiroha:
//!
//! - **basic**: Gin + Viper layered layout, a `/test` route and a YAML config.
//! - **swagger**: everything in basic, plus a sample annotated handler, the
//!   gin-swagger UI route, the swaggo requirements in `go.mod` and a `docs`
//!   folder for `swag init` output.
//!
//! Placeholders are `{{PROJECT_NAME}}` and `{{GO_VERSION}}`. Files are listed
//! in write order.

use shiroha_core::domain::{DirectoryManifest, TemplateEntry, TemplateSet, TemplateVariant};

/// Directories created under `<name>/` for every variant.
pub const BASE_DIRECTORIES: [&str; 14] = [
    "cmd",
    "internal/database",
    "internal/handler",
    "internal/model",
    "internal/repository",
    "internal/request",
    "internal/response",
    "internal/router",
    "internal/service",
    "pkg/common",
    "pkg/jwt",
    "pkg/utils",
    "config",
    "sql",
];

/// Every built-in template set, basic first.
pub fn all_templates() -> Vec<TemplateSet> {
    TemplateVariant::ALL.into_iter().map(template_for).collect()
}

pub fn template_for(variant: TemplateVariant) -> TemplateSet {
    match variant {
        TemplateVariant::Basic => basic(),
        TemplateVariant::Swagger => swagger(),
    }
}

pub fn basic() -> TemplateSet {
    TemplateSet::new(
        TemplateVariant::Basic,
        DirectoryManifest::new(BASE_DIRECTORIES),
    )
    .description("Gin + Viper service with a layered layout")
    .with_entry(TemplateEntry::parameterized("go.mod", GO_MOD_BASIC))
    .with_entry(TemplateEntry::parameterized("cmd/server.go", SERVER_BASIC))
    .with_entry(TemplateEntry::literal(
        "internal/router/main_router.go",
        MAIN_ROUTER,
    ))
    .with_entry(TemplateEntry::parameterized("README.md", README))
    .with_entry(TemplateEntry::literal("config.yaml", CONFIG_YAML))
    .with_entry(TemplateEntry::literal("config/config.go", CONFIG_GO))
}

pub fn swagger() -> TemplateSet {
    TemplateSet::new(
        TemplateVariant::Swagger,
        DirectoryManifest::new(BASE_DIRECTORIES.into_iter().chain(["docs"])),
    )
    .description("Basic layout plus Swagger annotations and gin-swagger UI")
    .with_entry(TemplateEntry::parameterized("go.mod", GO_MOD_SWAGGER))
    .with_entry(TemplateEntry::parameterized(
        "cmd/server.go",
        SERVER_SWAGGER,
    ))
    .with_entry(TemplateEntry::literal(
        "internal/router/main_router.go",
        MAIN_ROUTER,
    ))
    .with_entry(TemplateEntry::parameterized(
        "internal/handler/hello_handler.go",
        HELLO_HANDLER,
    ))
    .with_entry(TemplateEntry::parameterized("README.md", README_SWAGGER))
    .with_entry(TemplateEntry::literal("config.yaml", CONFIG_YAML))
    .with_entry(TemplateEntry::literal("config/config.go", CONFIG_GO))
}

// ── go.mod ────────────────────────────────────────────────────────────────────

const GO_MOD_BASIC: &str = r#"module {{PROJECT_NAME}}

go {{GO_VERSION}}

require (
	github.com/gin-gonic/gin v1.9.1
	github.com/spf13/viper v1.18.2
)
"#;

const GO_MOD_SWAGGER: &str = r#"module {{PROJECT_NAME}}

go {{GO_VERSION}}

require (
	github.com/gin-gonic/gin v1.9.1
	github.com/spf13/viper v1.18.2
	github.com/swaggo/files v1.0.1
	github.com/swaggo/gin-swagger v1.6.0
)
"#;

// ── cmd/server.go ─────────────────────────────────────────────────────────────

const SERVER_BASIC: &str = r#"package main

import (
	"fmt"
	"log"

	"{{PROJECT_NAME}}/config"
	"{{PROJECT_NAME}}/internal/router"

	"github.com/gin-gonic/gin"
)

func init() {
	config.LoadConfig()
}

func main() {
	r := router.InitRouter()

	r.GET("/test", func(c *gin.Context) {
		c.JSON(200, gin.H{
			"message": "Hello Shiroha",
		})
	})

	port := config.Cfg.Server.Port
	fmt.Printf("Server running at http://localhost:%d\n", port)
	if err := r.Run(fmt.Sprintf(":%d", port)); err != nil {
		log.Printf("server start error: %v", err)
	}
}
"#;

// The OpenAPI document is served from docs/swagger.json so the project
// compiles (and `go mod tidy` succeeds) before `swag init` has run.
const SERVER_SWAGGER: &str = r#"package main

import (
	"fmt"
	"log"

	"{{PROJECT_NAME}}/config"
	"{{PROJECT_NAME}}/internal/handler"
	"{{PROJECT_NAME}}/internal/router"

	"github.com/gin-gonic/gin"
	swaggerFiles "github.com/swaggo/files"
	ginSwagger "github.com/swaggo/gin-swagger"
)

// @title           {{PROJECT_NAME}} API
// @version         1.0
// @description     HTTP API generated by Shiroha.
// @BasePath        /
func init() {
	config.LoadConfig()
}

func main() {
	r := router.InitRouter()

	r.GET("/test", func(c *gin.Context) {
		c.JSON(200, gin.H{
			"message": "Hello Shiroha",
		})
	})
	r.GET("/hello", handler.Hello)

	r.StaticFile("/swagger/doc.json", "./docs/swagger.json")
	r.GET("/swagger/*any", ginSwagger.WrapHandler(swaggerFiles.Handler, ginSwagger.URL("/swagger/doc.json")))

	port := config.Cfg.Server.Port
	fmt.Printf("Server running at http://localhost:%d\n", port)
	fmt.Printf("Swagger UI at http://localhost:%d/swagger/index.html\n", port)
	if err := r.Run(fmt.Sprintf(":%d", port)); err != nil {
		log.Printf("server start error: %v", err)
	}
}
"#;

// ── internal ──────────────────────────────────────────────────────────────────

const MAIN_ROUTER: &str = r#"package router

import (
	"github.com/gin-gonic/gin"
)

func InitRouter() *gin.Engine {
	r := gin.Default()
	return r
}
"#;

const HELLO_HANDLER: &str = r#"package handler

import (
	"net/http"

	"github.com/gin-gonic/gin"
)

// HelloResponse is the payload returned by Hello.
type HelloResponse struct {
	Message string `json:"message"`
}

// Hello godoc
// @Summary      Say hello
// @Description  Returns a greeting from {{PROJECT_NAME}}
// @Tags         hello
// @Produce      json
// @Success      200  {object}  HelloResponse
// @Router       /hello [get]
func Hello(c *gin.Context) {
	c.JSON(http.StatusOK, HelloResponse{Message: "Hello Shiroha"})
}
"#;

// ── docs & config ─────────────────────────────────────────────────────────────

const README: &str = r#"# {{PROJECT_NAME}}

This project uses Go language with a layered architecture.

## Structure
- internal/handler: Interface layer (Controller)
- internal/service: Business logic layer
- internal/repository: Data access layer

## Startup
1. cd {{PROJECT_NAME}}
2. go mod tidy
3. go run cmd/server.go
"#;

const README_SWAGGER: &str = r#"# {{PROJECT_NAME}}

This project uses Go language with a layered architecture.

## Structure
- internal/handler: Interface layer (Controller)
- internal/service: Business logic layer
- internal/repository: Data access layer
- docs: Generated Swagger documentation

## Startup
1. cd {{PROJECT_NAME}}
2. go mod tidy
3. shiroha doc (or: swag init -g cmd/server.go -o docs)
4. go run cmd/server.go

Swagger UI: http://localhost:8080/swagger/index.html
"#;

const CONFIG_YAML: &str = "server:\n  port: 8080";

const CONFIG_GO: &str = r#"package config

import (
	"log"

	"github.com/spf13/viper"
)

type Config struct {
	Server *ServerConfig `mapstructure:"server"`
}

type ServerConfig struct {
	Port int `mapstructure:"port"`
}

var Cfg *Config

func LoadConfig() {
	v := viper.New()
	v.SetConfigName("config")
	v.SetConfigType("yaml")

	v.AddConfigPath(".")
	v.AddConfigPath("./config")
	v.AddConfigPath("../config")
	v.AddConfigPath("..")

	if err := v.ReadInConfig(); err != nil {
		log.Fatalf("Failed to read config file: %v", err)
	}

	Cfg = &Config{}
	if err := v.Unmarshal(Cfg); err != nil {
		log.Fatalf("Failed to unmarshal config: %v", err)
	}
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use shiroha_core::domain::{ProjectName, RenderContext, ToolchainVersion};

    fn rendered(set: &TemplateSet, path: &str) -> String {
        let ctx = RenderContext::new(
            &ProjectName::parse("demo").unwrap(),
            ToolchainVersion::new(1, 22),
        );
        set.entry(path).unwrap().content.render(&ctx)
    }

    #[test]
    fn builtin_sets_are_valid() {
        for set in all_templates() {
            set.validate().unwrap();
        }
    }

    #[test]
    fn basic_layout() {
        let set = basic();
        assert_eq!(set.manifest.len(), 14);
        assert!(!set.manifest.contains("docs"));
        assert!(set.entry("go.mod").is_some());
        assert!(set.entry("internal/handler/hello_handler.go").is_none());
    }

    #[test]
    fn swagger_extends_basic() {
        let set = swagger();
        assert_eq!(set.manifest.len(), 15);
        assert!(set.manifest.contains("docs"));
        assert!(set.entry("internal/handler/hello_handler.go").is_some());
        let go_mod = rendered(&set, "go.mod");
        assert!(go_mod.starts_with("module demo\n"));
        assert!(go_mod.contains("github.com/swaggo/gin-swagger"));
    }

    #[test]
    fn config_yaml_is_exact() {
        let set = basic();
        assert_eq!(rendered(&set, "config.yaml"), "server:\n  port: 8080");
    }
}
