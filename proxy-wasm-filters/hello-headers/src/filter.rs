use header_filter::{HelloHeaders, HelloHeadersRoot, ProxyWasmHost};
use log::info;
use proxy_wasm::{traits::*, types::*};

proxy_wasm::main! {{
    proxy_wasm::set_log_level(LogLevel::Info);
    header_filter::set_panic_hook();
    proxy_wasm::set_root_context(|context_id| -> Box<dyn RootContext> {
        Box::new(HelloHeadersFilterRoot {
            root: HelloHeadersRoot::new(context_id, ProxyWasmHost),
        })
    });
}}

struct HelloHeadersFilterRoot {
    root: HelloHeadersRoot<ProxyWasmHost>,
}

impl Context for HelloHeadersFilterRoot {
    fn on_done(&mut self) -> bool {
        self.root.stop();
        true
    }
}

impl RootContext for HelloHeadersFilterRoot {
    fn on_vm_start(&mut self, config_size: usize) -> bool {
        info!(
            "#{} on_vm_start, config_size: {}",
            self.root.context_id(),
            config_size
        );
        true
    }

    fn on_configure(&mut self, _config_size: usize) -> bool {
        self.root.start().is_ok()
    }

    fn get_type(&self) -> Option<ContextType> {
        Some(ContextType::HttpContext)
    }

    fn create_http_context(&self, context_id: u32) -> Option<Box<dyn HttpContext>> {
        let stream = self.root.spawn(context_id)?;
        Some(Box::new(HelloHeadersFilter { stream }))
    }
}

struct HelloHeadersFilter {
    stream: HelloHeaders<ProxyWasmHost>,
}

impl Context for HelloHeadersFilter {
    fn on_done(&mut self) -> bool {
        self.stream.on_done();
        true
    }
}

impl HttpContext for HelloHeadersFilter {
    fn on_http_request_headers(&mut self, nheaders: usize, eof: bool) -> Action {
        self.stream.on_request_headers(nheaders, eof)
    }

    fn on_http_response_headers(&mut self, nheaders: usize, eof: bool) -> Action {
        self.stream.on_response_headers(nheaders, eof)
    }
}
