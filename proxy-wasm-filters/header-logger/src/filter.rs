use header_filter::{HeaderLogger, HeaderLoggerRoot, ProxyWasmHost};
use proxy_wasm::{traits::*, types::*};

proxy_wasm::main! {{
    proxy_wasm::set_log_level(LogLevel::Info);
    header_filter::set_panic_hook();
    proxy_wasm::set_root_context(|context_id| -> Box<dyn RootContext> {
        Box::new(HeaderLoggerFilterRoot {
            root: HeaderLoggerRoot::new(context_id, ProxyWasmHost),
        })
    });
}}

struct HeaderLoggerFilterRoot {
    root: HeaderLoggerRoot<ProxyWasmHost>,
}

impl Context for HeaderLoggerFilterRoot {
    fn on_done(&mut self) -> bool {
        self.root.stop();
        true
    }
}

impl RootContext for HeaderLoggerFilterRoot {
    fn on_configure(&mut self, _: usize) -> bool {
        self.root.start();
        true
    }

    fn get_type(&self) -> Option<ContextType> {
        Some(ContextType::HttpContext)
    }

    fn create_http_context(&self, context_id: u32) -> Option<Box<dyn HttpContext>> {
        let stream = self.root.spawn(context_id)?;
        Some(Box::new(HeaderLoggerFilter { stream }))
    }
}

struct HeaderLoggerFilter {
    stream: HeaderLogger<ProxyWasmHost>,
}

impl Context for HeaderLoggerFilter {
    fn on_done(&mut self) -> bool {
        self.stream.on_done();
        true
    }
}

impl HttpContext for HeaderLoggerFilter {
    fn on_http_request_headers(&mut self, nheaders: usize, eof: bool) -> Action {
        self.stream.on_request_headers(nheaders, eof)
    }

    fn on_http_response_headers(&mut self, nheaders: usize, eof: bool) -> Action {
        self.stream.on_response_headers(nheaders, eof)
    }
}
