use multiversx_sc::proxy_imports::*;

/// Contract that carries out `GenericAction` proposals once they pass.
/// It exposes `handleAction(dao_address, proposal_id, payload)`.
pub struct ActionHandlerProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for ActionHandlerProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = ActionHandlerProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        ActionHandlerProxyMethods { wrapped_tx: tx }
    }
}

pub struct ActionHandlerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> ActionHandlerProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn handle_action<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<u64>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        dao_address: Arg0,
        proposal_id: Arg1,
        payload: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("handleAction")
            .argument(&dao_address)
            .argument(&proposal_id)
            .argument(&payload)
            .original_result()
    }
}
